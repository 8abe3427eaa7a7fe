use clap::Parser;

fn main() -> anyhow::Result<()> {
    result_tools_common::init_logging();
    let options = result_utils::Options::parse();
    result_utils::run(&options)
}
