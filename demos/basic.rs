use anyhow::Result;
use passmeter::{Analyzer, Location};

fn main() -> Result<()> {
    let analyzer = Analyzer::open(Location::Automatic)?;

    for password in &["password", "abc123", "Tr0ub4dor&3", "correct horse battery staple"] {
        let analysis = analyzer.analyze(password);

        println!("{}", password);
        println!("  score:      {}/100 ({})", analysis.score(), analysis.strength());
        println!("  entropy:    {} bits", analysis.entropy());
        println!("  crack time: {}", analysis.crack_time());
        for recommendation in analysis.recommendations() {
            println!("  - {}", recommendation);
        }
        println!();
    }

    Ok(())
}
