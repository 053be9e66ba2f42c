use anyhow::Result;
use passmeter::{Analyzer, CommonPasswords};

fn main() -> Result<()> {
    let mut banned = CommonPasswords::bundled();
    banned.extend(["acme", "acme2024", "changeme"].iter());

    let analyzer = Analyzer::default()
        .common_passwords(banned)
        .crack_speed(1_000_000.0);

    for password in &["acme2024", "uY3#pLw9$qRf2@Nd"] {
        let analysis = analyzer.analyze(password);
        println!(
            "{}: {} ({}/100), crackable in {}",
            password,
            analysis.strength(),
            analysis.score(),
            analysis.crack_time(),
        );
    }

    Ok(())
}
