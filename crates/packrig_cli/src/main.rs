mod args;
mod types;

use std::{fs, process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;

use packrig::{Mode, PluginDirective, RigOptions, Rigger};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn print_pages(plugins: &[PluginDirective]) {
  let pages = plugins
    .iter()
    .filter_map(|directive| match directive {
      PluginDirective::HtmlEmit { template, filename, .. } => Some((template, filename)),
      _ => None,
    })
    .collect::<Vec<_>>();

  let mut left = 0;

  for (_, filename) in &pages {
    if filename.len() > left {
      left = filename.len();
    }
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (template, filename) in pages {
    eprintln!(
      "{}{:pad$} {}{}",
      color.paint(filename.as_str()),
      "",
      dim.paint("page │ from: "),
      dim.paint(template.as_str()),
      pad = left - filename.len()
    );
  }
}

fn main() -> ExitCode {
  let args = Commands::parse();
  let InputArgs { cwd, mode, src, pages, template_ext } = args.input;

  // The one ambient read: `--mode` wins, `NODE_ENV` is the fallback.
  let mode = match mode {
    Some(mode) => mode.into(),
    None => Mode::from_node_env(std::env::var("NODE_ENV").ok().as_deref()),
  };

  let rigger = Rigger::new(RigOptions {
    mode: Some(mode),
    cwd,
    src_dir: src,
    out_dir: args.output.dir,
    pages_dir: pages,
    template_ext,
    entry: None,
    copy: None,
    dev_port: args.enhance.port,
  });

  let start = Instant::now();
  match rigger.resolve() {
    Ok(output) => {
      if !args.enhance.silent {
        // Print warnings
        for warning in &output.warnings {
          eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }

        // Print emitted pages
        print_pages(&output.config.plugins);
      }

      let json = if args.output.compact {
        output.config.to_json()
      } else {
        output.config.to_json_pretty()
      };

      if let Some(path) = &args.output.file {
        if let Err(error) = fs::write(path, &json) {
          eprintln!("{} {}", Colour::Red.paint("Error:"), error);
          return ExitCode::FAILURE;
        }
      } else {
        println!("{json}");
      }

      if !args.enhance.silent {
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        eprintln!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }

      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
