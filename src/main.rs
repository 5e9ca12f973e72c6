use anyhow::Result;
use quiz_batch_generate::orchestrator::App;
use quiz_batch_generate::{logger, Config};

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置（环境变量 + 位置参数：源目录、输出目录）
    let mut config = Config::from_env();
    config.apply_args(std::env::args().skip(1));

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
