use std::path::PathBuf;

use clap::Parser;

use crate::controllers::frame::{ShaderError, ShaderSources};

/// Window and shader options for the interactive viewer.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Interactive GPU Mandelbrot and Julia set viewer", long_about = None)]
pub struct ViewerConfig {
    /// Window width in pixels.
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Open a normal window instead of borderless fullscreen.
    #[arg(long)]
    pub windowed: bool,

    /// Load the WGSL shaders from this directory instead of the built-in ones.
    #[arg(long, value_name = "PATH")]
    pub shader_dir: Option<PathBuf>,

    #[arg(long, default_value = "Julia Set Renderer")]
    pub title: String,
}

impl ViewerConfig {
    pub fn shader_sources(&self) -> Result<ShaderSources, ShaderError> {
        match &self.shader_dir {
            Some(dir) => ShaderSources::from_dir(dir),
            None => Ok(ShaderSources::embedded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerConfig;
    use crate::controllers::frame::{ShaderError, ShaderSources};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_fullscreen_1080p() {
        let config = ViewerConfig::try_parse_from(["fractal_renderer"]).unwrap();

        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert!(!config.windowed);
        assert_eq!(config.shader_dir, None);
        assert_eq!(config.title, "Julia Set Renderer");
    }

    #[test]
    fn flags_override_defaults() {
        let config = ViewerConfig::try_parse_from([
            "fractal_renderer",
            "--width",
            "800",
            "--height",
            "600",
            "--windowed",
            "--shader-dir",
            "shaders",
            "--title",
            "Fractals",
        ])
        .unwrap();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.windowed);
        assert_eq!(config.shader_dir, Some(PathBuf::from("shaders")));
        assert_eq!(config.title, "Fractals");
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(ViewerConfig::try_parse_from(["fractal_renderer", "--width", "wide"]).is_err());
    }

    #[test]
    fn embedded_sources_without_shader_dir() {
        let config = ViewerConfig::try_parse_from(["fractal_renderer"]).unwrap();

        assert_eq!(config.shader_sources().unwrap(), ShaderSources::embedded());
    }

    #[test]
    fn missing_shader_dir_is_an_io_error() {
        let config = ViewerConfig::try_parse_from([
            "fractal_renderer",
            "--shader-dir",
            "/nonexistent/fractal_renderer_shaders",
        ])
        .unwrap();

        assert!(matches!(config.shader_sources(), Err(ShaderError::Io { .. })));
    }
}
