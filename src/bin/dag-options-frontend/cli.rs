use clap::{Parser, command};

use workflow_dag_render_options::render_options::{ExpandedNodes, RenderOptions};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(long = "loglevel", default_value_t = String::from("info"))]
    pub log_level: String,

    /// Start with artifact nodes hidden
    #[arg(long = "hideArtifacts")]
    pub hide_artifacts: bool,

    /// Start with every node expanded
    #[arg(long = "expandAll")]
    pub expand_all: bool,
}

impl Cli {
    /// Initial options for this session; nothing is persisted between runs
    pub fn initial_render_options(&self) -> RenderOptions {
        RenderOptions {
            show_artifacts: !self.hide_artifacts,
            expand_nodes: if self.expand_all {
                ExpandedNodes::all()
            } else {
                ExpandedNodes::none()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_give_default_options() {
        let cli = Cli::parse_from(["dag-options-frontend"]);
        assert_eq!(cli.initial_render_options(), RenderOptions::default());
    }

    #[test]
    fn test_flags_seed_initial_options() {
        let cli = Cli::parse_from(["dag-options-frontend", "--hideArtifacts", "--expandAll"]);
        let options = cli.initial_render_options();

        assert!(!options.show_artifacts);
        assert_eq!(options.expand_nodes, ExpandedNodes::All);
    }
}
