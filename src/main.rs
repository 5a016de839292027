use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use logweave::{DEFAULT_CHUNK_SIZE, LinesSource, LogMerger, MergeConfig, WriterSink};

#[derive(Parser)]
#[command(
  name = "logweave",
  about = "Merge time-ordered log files into a single stream",
  version
)]
struct Cli {
  /// Input log files, each already sorted by its leading `<timestamp>` token
  #[arg(required = true)]
  inputs: Vec<PathBuf>,

  /// Destination file for the merged stream; stdout when omitted
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Per-source read-ahead window, in lines
  #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
  chunk_size: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt::init();
  let cli = Cli::parse();

  let config = MergeConfig::new(cli.chunk_size)?;
  let mut merger = LogMerger::new(config);
  for path in &cli.inputs {
    let source = LinesSource::open(path)
      .await
      .with_context(|| format!("opening {}", path.display()))?;
    merger.add_source(path.display().to_string(), source);
  }

  let emitted = match &cli.output {
    Some(path) => {
      let mut sink = WriterSink::create(path)
        .await
        .with_context(|| format!("creating {}", path.display()))?;
      let emitted = merger.merge_into(&mut sink).await?;
      sink.flush().await?;
      emitted
    }
    None => {
      let mut sink = WriterSink::new(tokio::io::stdout());
      let emitted = merger.merge_into(&mut sink).await?;
      sink.flush().await?;
      emitted
    }
  };

  tracing::info!(lines = emitted, files = cli.inputs.len(), "done merging");
  Ok(())
}
