use std::path::Path;

/// Pipeline role of a shader source, inferred from its file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEval,
    RayGen,
    ClosestHit,
    AnyHit,
    Miss,
}

impl ShaderStage {
    /// Classifies a file by its suffix. Suffixes outside the fixed stage
    /// set yield `None` and the file is not compiled.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let stage = match path.as_ref().extension()?.to_str()? {
            "vert" => Self::Vertex,
            "frag" => Self::Fragment,
            "comp" => Self::Compute,
            "geom" => Self::Geometry,
            "tesc" => Self::TessControl,
            "tese" => Self::TessEval,
            "rgen" => Self::RayGen,
            "rchit" => Self::ClosestHit,
            "rahit" => Self::AnyHit,
            "rmiss" => Self::Miss,
            _ => return None,
        };
        Some(stage)
    }
}
