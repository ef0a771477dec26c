use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gdbump::io::DefaultGdbWriter;
use gdbump::logging::init_logging;
use gdbump::{create_backup, Axis, ChangeValue, EditReport, EditorConfig, GdbEditor, APP_NAME};

#[derive(Parser)]
#[command(name = "gdbump")]
#[command(about = "批量修改反编译后的 .GDB 文本中某个轴/通道的数值")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// 要修改的轴: x, y, z, tu, tv, r, g, b, a
    #[arg(value_name = "AXIS")]
    axis: String,

    /// 变更值(正数或负数)；以 ~ 开头表示直接替换，如 ~20
    #[arg(value_name = "CHANGE", allow_hyphen_values = true)]
    change: String,

    /// 由 LR1 Binary Editor 反编译得到的 GDB 文本
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// 修改后的输出文件
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// 静默模式(仅输出错误)
    #[arg(short, long)]
    quiet: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 列出每一行修改
    #[arg(long)]
    show_changes: bool,

    /// 覆盖前备份已存在的输出文件
    #[arg(long)]
    backup: bool,

    /// JSON 配置文件(关键字、编码)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("错误: {:#}", err);
        process::exit(1);
    }
}

/// 解析命令行；显示帮助或缺少参数时打印用法并正常退出
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingRequiredArgument => {
                let _ = Cli::command().print_help();
                println!();
                process::exit(0);
            }
            _ => err.exit(),
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.quiet {
        println!("\n{}\n", APP_NAME);
    }

    let axis: Axis = cli.axis.parse()?;
    let change: ChangeValue = cli.change.parse()?;
    let config = load_config(cli)?;

    let mut editor = GdbEditor::open(&cli.input, config)?;
    let report = editor.change_values(axis, change)?;

    if cli.backup && cli.output.exists() {
        let backup_path = create_backup(&cli.output)
            .with_context(|| format!("备份输出文件失败: {:?}", cli.output))?;
        if !cli.quiet {
            println!("已备份原输出文件到: {:?}", backup_path);
        }
    }

    editor
        .save(&DefaultGdbWriter, &cli.output)
        .with_context(|| format!("写入文件失败: {:?}", cli.output))?;

    if !cli.quiet {
        print_summary(cli, &report);
    }

    Ok(())
}

/// 加载配置文件，未指定时使用默认配置
fn load_config(cli: &Cli) -> Result<EditorConfig> {
    match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path)),
        None => Ok(EditorConfig::default()),
    }
}

/// 打印摘要信息
fn print_summary(cli: &Cli, report: &EditReport) {
    println!("{}", report.summary(&cli.output));

    if cli.show_changes && !report.is_empty() {
        println!();
        for change in report.iter() {
            println!("  {} | {}", change, change.line.trim_end());
        }
    }
}
