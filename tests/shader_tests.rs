//! Validation of the WGSL render shaders.
//!
//! These tests parse and validate the shader sources with naga, then check
//! the pieces of the shader contract that live in the source text.

use arbor::shader::{FOLIAGE_SOURCE, ORNAMENT_SOURCE, STAR_SOURCE};

/// Validates WGSL code using naga.
fn validate_wgsl(code: &str) -> Result<(), String> {
    let module =
        naga::front::wgsl::parse_str(code).map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn test_foliage_shader_valid() {
    validate_wgsl(FOLIAGE_SOURCE).expect("Foliage WGSL should be valid");
}

#[test]
fn test_ornament_shader_valid() {
    validate_wgsl(ORNAMENT_SOURCE).expect("Ornament WGSL should be valid");
}

#[test]
fn test_star_shader_valid() {
    validate_wgsl(STAR_SOURCE).expect("Star WGSL should be valid");
}

#[test]
fn test_foliage_shader_contract() {
    // Eased blend between the two endpoints.
    assert!(FOLIAGE_SOURCE.contains("smoothstep"));
    assert!(FOLIAGE_SOURCE.contains("scatter_pos"));
    assert!(FOLIAGE_SOURCE.contains("tree_pos"));

    // Circular mask with soft falloff and the sparkle threshold mix.
    assert!(FOLIAGE_SOURCE.contains("discard"));
    assert!(FOLIAGE_SOURCE.contains("step(0.85"));

    // Breathing displacement settles toward the assembled amplitude.
    assert!(FOLIAGE_SOURCE.contains("mix(0.5, 0.08"));
}

#[test]
fn test_shaders_share_uniform_block() {
    // All three pipelines bind the same frame-global uniform struct; the
    // declarations must stay in sync field for field.
    let block = |src: &str| {
        let start = src.find("struct SceneUniforms").expect("uniform struct");
        let end = src[start..].find("\n}").expect("struct end") + start;
        src[start..end].to_string()
    };
    let foliage = block(FOLIAGE_SOURCE);
    assert_eq!(foliage, block(ORNAMENT_SOURCE));
    assert_eq!(foliage, block(STAR_SOURCE));
}
