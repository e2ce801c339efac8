use std::process::ExitCode;

use crate::environment::UserEnvironment;
use crate::java::Paths;

/// Everything a command needs from the outside world.
pub struct Context {
    pub paths: Paths,
    pub env: Box<dyn UserEnvironment>,
    /// Print extra detail; commands decide what that means.
    pub verbose: bool,
}

/// A parsed subcommand that can be executed.
#[allow(async_fn_in_trait)]
pub trait Run {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode>;
}
