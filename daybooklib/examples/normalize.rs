use daybooklib::{
    formats::markdown::Markdown,
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: перечитать дневной документ и записать его в каноническом виде (stdin -> stdout)
    let doc = Markdown::read(std::io::BufReader::new(std::io::stdin()))?;
    Markdown::write(std::io::stdout(), &doc)?;
    Ok(())
}
