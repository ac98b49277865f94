pub type CmdResult<T> = importfix::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod fix;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (importfix::Result<serde_json::Value>, i32) {
    crate::tty::status("importfix is working...");

    match command {
        crate::Commands::Fix(args) => dispatch!(args, global, fix),
    }
}
