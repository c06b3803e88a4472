//! # 图片取色工具：命令行入口
//!
//! 无界面模式：读取图片 → 铺满绘制 → 在给定视口坐标处模拟一次点击/触摸 → 输出颜色。
//! 业务逻辑都在 `picker` 模块中，详见 `lib.rs` 架构文档。
//!
//! ```text
//! image-color-picker photo.jpg --x 160 --y 160
//! image-color-picker photo.jpg --x 210 --y 90 --left 50 --top 20 --touch
//! image-color-picker photo.jpg --x 10 --y 10 --config picker.json --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use image_color_picker::error::AppError;
use image_color_picker::picker::{
    ClientPoint, ImageLoader, PickerConfig, PickerError, PickerState, PointerEvent, SurfaceBounds,
};

/// 图片取色工具（无界面模式）。
#[derive(Parser, Debug)]
#[command(
    name = "image-color-picker",
    about = "Cover-crop an image into a fixed square surface and pick the color under a pointer"
)]
struct CliArgs {
    /// 图片文件路径。
    file: PathBuf,

    /// 指针视口 X 坐标。
    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    /// 指针视口 Y 坐标。
    #[arg(long, allow_hyphen_values = true)]
    y: f64,

    /// 以触摸事件而非鼠标事件发送。
    #[arg(long)]
    touch: bool,

    /// 绘制表面包围盒左边缘（视口坐标）。
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    left: f64,

    /// 绘制表面包围盒上边缘（视口坐标）。
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    top: f64,

    /// JSON 配置文件，缺省字段使用默认值。
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 以 JSON 输出结果。
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("[{}] {}", err.code(), err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => PickerConfig::from_json_file(path)?,
        None => PickerConfig::default(),
    };
    let mut state = PickerState::new(config)?;

    // 与库内 handle_file_change 相同的流程，但读取错误要反映到退出码
    let ticket = state.begin_load();
    let source = ImageLoader::read_as_data_url(&args.file, state.config()).await?;
    state.commit_load(ticket, Ok(source));

    if state.surface().is_none() {
        return Err(PickerError::Decode(format!("无法绘制图片：{}", args.file.display())).into());
    }

    let mut event = if args.touch {
        PointerEvent::touch(vec![ClientPoint::new(args.x, args.y)])
    } else {
        PointerEvent::mouse(args.x, args.y)
    };
    state.handle_pointer(&mut event, SurfaceBounds::new(args.left, args.top));

    let Some(display) = state.display() else {
        return Err(AppError::Usage(format!(
            "坐标 ({}, {}) 未能采样到颜色",
            args.x, args.y
        )));
    };

    if args.json {
        let output = serde_json::json!({
            "hex": display.hex,
            "rgb": display.rgb,
            "swatch": display.swatch,
        });
        println!("{}", output);
    } else {
        println!("Selected Color: {}", display.hex);
        println!("RGB: {}", display.rgb);
    }

    Ok(())
}
