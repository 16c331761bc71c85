use clap::Parser;
use std::path::PathBuf;

/// Arguments for the track command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replay scroll frames from a layout file:\n    folio track layout.yaml\n\n\
                  LAYOUT FILE:\n    \
                  viewport_height: 800\n    \
                  document_height: 3000\n    \
                  sections:\n      \
                  - { id: about, top: 0, height: 900 }\n      \
                  - { id: projects, top: 900, height: 1000 }\n    \
                  frames: [0, 400, 800, 2200]\n    \
                  start: /blog     # optional, route to begin on\n    \
                  select: projects # optional, nav click before the frames")]
pub struct TrackArgs {
    /// Layout file (YAML)
    pub layout: PathBuf,
}
