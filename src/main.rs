//! levelog - レベル付きロギングファサードのデモ

mod cli;
mod logging;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
