use clap::{Parser, Subcommand};
use daybooklib::{
    error::Result,
    handler::{handle_message, WriterReply},
    ledger::{Config, Ledger},
    path::day_path,
};
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "daybook", version, about = "Дневник расходов и доходов")]
struct Cli {
    /// Корень хранилища (папка заметок)
    #[arg(long = "vault", env = "VAULT_PATH")]
    vault: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Добавить одно сообщение (из --text или stdin)
    Add {
        #[arg(short = 't', long = "text")]
        text: Option<String>,
    },

    /// Читать stdin: каждый абзац через пустую строку — отдельное сообщение
    Listen,

    /// Показать путь к файлу за сегодня
    Path,
}

fn main() -> Result<()> {
    // логи в stderr, ответы в stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {e}");
    }

    let cli = Cli::parse();
    let ledger = Ledger::new(Config::new(cli.vault));
    let today = chrono::Local::now().date_naive();
    let mut reply = WriterReply(io::stdout().lock());

    match cli.command {
        Command::Add { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            handle_message(&ledger, &text, today, &mut reply)
        }

        Command::Listen => {
            tracing::info!(vault = %ledger.config().vault.display(), "listening on stdin");
            let mut message = String::new();
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    flush_message(&ledger, &mut message, &mut reply)?;
                } else {
                    message.push_str(&line);
                    message.push('\n');
                }
            }
            flush_message(&ledger, &mut message, &mut reply)
        }

        Command::Path => {
            println!("{}", day_path(&ledger.config().vault, today).display());
            Ok(())
        }
    }
}

// дата берётся на момент обработки сообщения, а не запуска
fn flush_message<W: io::Write>(
    ledger: &Ledger,
    message: &mut String,
    reply: &mut WriterReply<W>,
) -> Result<()> {
    if message.is_empty() {
        return Ok(());
    }
    let today = chrono::Local::now().date_naive();
    let text = std::mem::take(message);
    handle_message(ledger, &text, today, reply)
}
