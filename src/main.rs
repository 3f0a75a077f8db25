use ib_match::{annotator, cli, config, error, logging, reference};
use cli::Cli;
use config::Config;
use error::MatchError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✘ {}", e);
            return exit_code(&e);
        }
    };

    if let Err(e) = logging::init(&config.log, cli.verbose) {
        eprintln!("✘ {}", e);
        return exit_code(&e);
    }

    let paths = match cli.paths() {
        Ok(paths) => paths,
        Err(e) => {
            if let MatchError::MissingArgument(prompt) = &e {
                eprintln!("{}", prompt);
            }
            tracing::info!(error = %e, "参数不完整");
            return exit_code(&e);
        }
    };

    println!("📋 ib-match - IB编码匹配\n");
    tracing::info!(summary = %paths.reference.display(), "汇总文件-匹配的路径");
    tracing::info!(detail = %paths.target.display(), "明细文件-匹配的路径");

    // 1. 汇总表
    println!("[1/2] 读取汇总文件...");
    let mapping = match reference::load_reference_mapping(&paths.reference) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::error!(error = %e, "读取汇总文件失败");
            eprintln!("✘ 读取汇总文件失败: {}", e);
            return exit_code(&e);
        }
    };
    println!("✔ 共{}行，{}个编码\n", mapping.rows_read(), mapping.len());

    // 2. 明细表
    println!("[2/2] 匹配明细文件...");
    let report = match annotator::annotate(&paths.target, &mapping) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "匹配错误");
            eprintln!("✘ 匹配错误: {}", e);
            return exit_code(&e);
        }
    };

    println!(
        "✔ {}个工作表，写入{}行，匹配{}行",
        report.sheets, report.rows_written, report.matched
    );
    if report.failures > 0 {
        println!("⚠ {}处操作失败，详见错误日志: {}", report.failures, config.log.error_path.display());
    }

    match &report.output {
        Some(output) => println!("\n✅ 已保存: {}", output.display()),
        None => println!("\n⚠ 保存失败，未生成输出文件"),
    }

    ExitCode::SUCCESS
}

fn exit_code(e: &MatchError) -> ExitCode {
    ExitCode::from(e.exit_status())
}
