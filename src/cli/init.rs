use crudinator::config::Config;
use crudinator::error::Result;
use crudinator::schema::GeneratorOptions;

/// Run the init command to generate an example configuration
pub fn run(output: Option<String>) -> Result<()> {
    tracing::info!("🎨 Generating example configuration...");

    let services = crate::cli::example::create_example_services();

    tracing::info!("✨ Created {} example services:", services.len());
    for service in &services {
        tracing::info!("   • {} ({}, {} fields)", service.model, service.type_name, service.fields.len());
        if let Some(desc) = &service.description {
            tracing::info!("     {}", desc);
        }
    }

    let config = Config {
        generator: GeneratorOptions::default(),
        service: services,
    };

    if let Some(output_path) = output {
        crudinator::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated example configuration: {}", output_path);
        tracing::info!("💡 Next: crudinator generate --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}
