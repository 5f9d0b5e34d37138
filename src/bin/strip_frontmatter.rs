use std::io::Read as _;

use anyhow::Context as _;
use coppertrace::frontmatter;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("read stdin")?;
    println!("{}", frontmatter::strip(&input));
    Ok(())
}
