//! result-utils：构建结果目录的目录摘要并保存为 JSON，或合并目录中已有的摘要。
//!
//! ```text
//! result-utils -p /usr/local/autotest/results/default
//! result-utils -p results/123-debug --merge > merged.json
//! ```

pub mod commands;

use std::path::PathBuf;

use result_tools_common::{SummaryConfig, MIN_FREE_DISK_BYTES};

#[derive(clap::Parser, Debug)]
#[clap(name = "result-utils", about = "Build a directory summary of test results")]
pub struct Options {
    /// Path to build directory summary.
    #[clap(short = 'p', long = "path")]
    pub path: PathBuf,

    /// Maximum result size in KB. Set to 0 to disable result throttling.
    #[clap(short = 'm', long = "max-size-kb", default_value_t = 0)]
    pub max_size_kb: u64,

    /// Merge all directory summaries under the path and print the merged summary.
    #[clap(long)]
    pub merge: bool,

    /// Minimum free disk space to keep after saving the summary file.
    #[clap(long, default_value_t = MIN_FREE_DISK_BYTES)]
    pub min_free_bytes: u64,

    /// Extra file names that are dropped from merged summaries once deleted.
    #[clap(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,
}

impl Options {
    pub fn config(&self) -> SummaryConfig {
        let mut config = SummaryConfig {
            max_size_kb: self.max_size_kb,
            min_free_disk_bytes: self.min_free_bytes,
            ..SummaryConfig::default()
        };
        config.files_to_ignore.extend(self.ignore.iter().cloned());
        config
    }
}

pub fn run(options: &Options) -> anyhow::Result<()> {
    let config = options.config();
    if options.merge {
        let stdout = std::io::stdout();
        commands::merge::merge_command(&options.path, &config, &mut stdout.lock())?;
    } else {
        commands::build::build_command(&options.path, &config)?;
    }
    Ok(())
}
