use clap::Args;
use epubinfo::errors::ERROR_CODES;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct CodesCommand {}

impl CodesCommand {
    pub fn codes(&self) -> ExitCode {
        print!("{}", self.render());
        ExitCode::SUCCESS
    }

    pub fn render(&self) -> String {
        ERROR_CODES
            .iter()
            .map(|(code, summary)| format!("{code}\t{summary}\n"))
            .collect()
    }
}
