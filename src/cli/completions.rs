use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    brandkit completions bash > ~/.bash_completion.d/brandkit\n\n\
                  Generate zsh completions:\n    brandkit completions zsh > ~/.zfunc/_brandkit\n\n\
                  Generate fish completions:\n    brandkit completions fish > ~/.config/fish/completions/brandkit.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
