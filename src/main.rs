// strwalk: walk a string literal one character at a time

use std::io;
use strwalk::checksum;
use strwalk::output::stdout::StdoutTerminal;
use strwalk::walker::constants::PANGRAM;
use strwalk::walker::engine::Walker;
use strwalk::walker::errors::WalkError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let walker = Walker::new(PANGRAM)?;

    eprintln!(
        "Walking {} characters at 0x{:08x}...",
        walker.length()?,
        walker.base()
    );

    let mut terminal = StdoutTerminal::new();
    let summary = match walker.run(&mut terminal) {
        Ok(summary) => summary,
        // Reader went away (e.g. piped into `head`); nothing left to report
        Err(WalkError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    eprintln!(
        "Walk completed: {} steps, crc32 {}",
        summary.steps,
        checksum::to_hex(summary.checksum)
    );

    Ok(())
}
