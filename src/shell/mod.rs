mod interactive_shell;
#[cfg(test)]
mod tests;

pub use interactive_shell::InteractiveShell;
