use select_flow::{init_logging, AppConfig, ExplainSource};

#[derive(Debug, Clone, Default)]
struct CliFlags {
    config_path: Option<String>,
    pretty: bool,
}

impl CliFlags {
    fn parse() -> Self {
        let mut flags = CliFlags::default();
        let mut args = std::env::args().skip(1).peekable();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(val) = args.next() {
                        flags.config_path = Some(val);
                    }
                }
                "--pretty" => flags.pretty = true,
                _ => {}
            }
        }
        flags
    }

    fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli_flags = CliFlags::parse();
    let Some(path) = cli_flags.config_path() else {
        return Err("usage: select-flow --config <file.yaml> [--pretty]".into());
    };

    let config = AppConfig::load_required(path)?;
    println!("[select-flow] loaded config: {}", path);

    let _logging_guard = init_logging(&config.logging)?;

    let source = ExplainSource::new(config.select.source.as_str()).pretty(cli_flags.pretty);
    let plan = config.select.builder(source)?.build()?;
    println!("{plan}");
    Ok(())
}
