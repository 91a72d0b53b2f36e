use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::response_shape::ResponseShape;
use crate::errors::{ErrlyzerError, ErrlyzerResult};
use crate::server::api_server::ApiServer;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_service::AnalysisService;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ErrlyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Serve { port } => self.serve_command(port).await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> ErrlyzerResult<()> {
        log::info!("🚀 Initializing errlyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to pick a model and response format.");
                log::info!("🔧 Run 'errlyzer validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>) -> ErrlyzerResult<()> {
        let mut config = self.load_config()?;

        if let Some(port) = port {
            config.server.port = port;
        }

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(ErrlyzerError::config_error(
                "Configuration is invalid",
                None,
                Some("Run 'errlyzer validate' for details"),
            ));
        }

        let api_key = ConfigManager::resolve_api_key(&config)?;
        let shape = ResponseShape::parse(&config.server.response_format)
            .ok_or_else(|| ErrlyzerError::validation_error(
                "response_format",
                &config.server.response_format,
                "must be 'text' or 'json'",
            ))?;

        let provider = Arc::new(GeminiProvider::new(api_key, &config.ai));
        log::info!("🤖 Upstream model: {}", config.ai.model);
        log::info!("📄 Response format: {}", shape.name());

        let service = Arc::new(AnalysisService::new(provider, shape));

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|_| ErrlyzerError::validation_error(
                "server.host",
                &config.server.host,
                "must form a valid socket address together with the port",
            ))?;

        let mut server = ApiServer::new(service);
        server.serve(addr).await
    }

    async fn validate_command(&self) -> ErrlyzerResult<()> {
        log::info!("🔍 Validating errlyzer configuration...");

        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
            }
            Err(errors) => {
                log::error!("❌ Issues found:");
                for error in &errors {
                    log::error!("   - {}", error);
                }
                return Err(ErrlyzerError::config_error(
                    "Configuration is invalid",
                    None,
                    Some("Fix the issues above and re-run 'errlyzer validate'"),
                ));
            }
        }

        match ConfigManager::resolve_api_key(&config) {
            Ok(_) => log::info!("🔑 API key is present"),
            Err(e) => {
                log::error!("❌ {}", e);
                return Err(e);
            }
        }

        log::info!("🤖 Model: {}", config.ai.model);
        log::info!("📄 Response format: {}", config.server.response_format);
        Ok(())
    }

    fn load_config(&self) -> ErrlyzerResult<Config> {
        match ConfigManager::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'errlyzer init' to create a configuration file.");
                Err(e)
            }
        }
    }
}
