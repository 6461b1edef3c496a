use crate::{command::config::ConfigArg, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PrintConfigArg {
    #[clap(flatten)]
    config: ConfigArg,
}

pub(crate) fn run(arg: &PrintConfigArg) -> anyhow::Result<()> {
    let config = arg.config.resolve()?;
    util::print_json(&config)
}
