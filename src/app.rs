use crate::api;
use crate::config::Config;
use crate::models::{load_batch_file, load_workbook, save_workbook, BulkResponse};
use crate::orchestrator::BulkProcessor;
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    processor: BulkProcessor,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config).await?;

        log_startup(&config);

        let processor = BulkProcessor::from_config(&config);

        Ok(Self { config, processor })
    }

    /// 运行应用主逻辑：读取请求 → 处理 → 写回工作簿
    pub async fn run(&self) -> Result<BulkResponse> {
        let batch = load_batch_file(Path::new(&self.config.batch_file)).await?;

        let workbook_path = Path::new(&self.config.workbook_path);
        let mut workbook = load_workbook(workbook_path).await?;

        let (response, summary) = api::dispatch_with_summary(
            &self.processor,
            &batch,
            &mut workbook,
            self.config.default_mode,
        );

        match summary {
            Some(summary) => {
                // 单条写入是立即生效的，只要有改动就写回
                if summary.changed() {
                    save_workbook(&workbook, workbook_path).await?;
                    info!("💾 工作簿已写回: {}", workbook_path.display());
                }
                print_final_stats(&summary, &self.config.output_log_file);
            }
            None => warn!("⚠️ 批量处理失败: {}", response.message),
        }

        let response_json = serde_json::to_string_pretty(&response)?;
        self.append_to_log(&response_json)?;
        println!("{}", response_json);

        Ok(response)
    }

    fn append_to_log(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", self.config.output_log_file))?;
        writeln!(file, "{}", content)?;
        Ok(())
    }
}
