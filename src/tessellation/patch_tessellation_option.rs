/// Options for regular grid tessellation of a Bezier patch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchTessellationOptions {
    /// Number of output samples along the u axis (columns)
    pub res_u: usize,
    /// Number of output samples along the v axis (rows)
    pub res_v: usize,
}

impl Default for PatchTessellationOptions {
    fn default() -> Self {
        Self {
            res_u: 16,
            res_v: 16,
        }
    }
}

impl PatchTessellationOptions {
    pub fn new(res_u: usize, res_v: usize) -> Self {
        Self { res_u, res_v }
    }

    pub fn with_res_u(mut self, res_u: usize) -> Self {
        self.res_u = res_u;
        self
    }

    pub fn with_res_v(mut self, res_v: usize) -> Self {
        self.res_v = res_v;
        self
    }
}
