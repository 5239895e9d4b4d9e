use answer_gen_tester::cli::Cli;
use answer_gen_tester::services::create_sample_input;
use answer_gen_tester::services::sample_writer::SAMPLE_PATH;
use answer_gen_tester::{logger, App, Config};
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置（凭据缺失时先不报错，--create-sample 不需要凭据）
    let config = Config::from_env(cli.config.as_deref());

    // 初始化日志
    logger::init(cli.verbose || config.as_ref().is_ok_and(|c| c.verbose_logging));

    if cli.create_sample {
        create_sample_input(Path::new(SAMPLE_PATH))?;
        info!("\n使用示例文件运行:");
        info!("  answer-gen-tester --input {}", SAMPLE_PATH);
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        error!("请通过 --input 指定输入文件，或使用 --create-sample 生成示例文件");
        info!("\n用法示例:");
        info!("  answer-gen-tester --create-sample");
        info!("  answer-gen-tester --input input/queries.csv");
        info!("  answer-gen-tester --input input/queries.csv --output output/results.csv --delay 2");
        anyhow::bail!("缺少输入文件");
    };

    let config = config.inspect_err(|e| {
        error!("❌ {}", e);
    })?;

    // 初始化并运行应用
    let app = App::initialize(config);
    match app
        .run(input, cli.output.as_deref(), Duration::from_secs(cli.delay))
        .await
    {
        Ok(_) => {
            info!("\n✅ 批处理完成!");
            Ok(())
        }
        Err(e) => {
            error!("❌ {}", e);
            if e.is_input_error() {
                error!("输入文件无效，未发出任何请求");
            }
            error!("\n批处理失败!");
            Err(e.into())
        }
    }
}
