//! Logging targets for the rendering primitives.

/// Target names for log filtering.
pub mod targets {
    /// Text measurement and font loading.
    pub const TEXT: &str = "capsule_render::text";
    /// Icon decoding.
    pub const ICON: &str = "capsule_render::icon";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn targets_are_under_the_crate() {
        for target in [targets::TEXT, targets::ICON] {
            assert!(target.starts_with("capsule_render::"), "{target}");
        }
    }
}
