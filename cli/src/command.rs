use clap::Subcommand;

mod codes;
mod show;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the title, creator and language of EPUB files.
    Show(show::ShowCommand),
    /// Print the table of extraction error codes.
    Codes(codes::CodesCommand),
}
