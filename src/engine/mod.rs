//! Command execution

pub mod executor;

pub use executor::{
    execute_command, execute_command_with_picker, ExecutionContext, ExecutionResult, ResultData,
};
