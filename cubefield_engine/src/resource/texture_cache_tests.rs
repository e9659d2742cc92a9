use std::path::PathBuf;
use std::sync::Arc;
use crate::error::Error;
use crate::graphics_device::MockGraphicsDevice;
use crate::resource::texture::DecodedImage;
use super::*;

fn checker() -> DecodedImage {
    DecodedImage {
        width: 2,
        height: 2,
        rgba: vec![
            255, 0, 0, 255, 0, 255, 0, 255,
            0, 0, 255, 255, 255, 255, 255, 255,
        ],
    }
}

fn write_png(file_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cubefield_{}_{}", std::process::id(), file_name));
    let mut image = image::RgbaImage::new(4, 2);
    // Top row red, bottom row blue
    for x in 0..4 {
        image.put_pixel(x, 0, image::Rgba([255, 0, 0, 255]));
        image.put_pixel(x, 1, image::Rgba([0, 0, 255, 255]));
    }
    image.save(&path).unwrap();
    path
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_same_name_shares_one_texture() {
    let mut device = MockGraphicsDevice::new(800, 600);
    let mut cache = TextureCache::new();

    let first = cache.get_or_insert(&mut device, "checker", &checker()).unwrap();
    let second = cache.get_or_insert(&mut device, "checker", &checker()).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(device.textures.len(), 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.use_count("checker"), 3);
    assert_eq!(cache.describe(), "checker (2 users)");
}

#[test]
fn test_release_all_destroys_textures() {
    let mut device = MockGraphicsDevice::new(800, 600);
    let mut cache = TextureCache::new();
    cache.get_or_insert(&mut device, "a", &checker()).unwrap();
    cache.get_or_insert(&mut device, "b", &checker()).unwrap();
    assert_eq!(device.textures.len(), 2);

    cache.release_all(&mut device);
    assert!(cache.is_empty());
    assert!(device.textures.is_empty());
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_load_png_flips_rows() {
    let path = write_png("flip.png");
    let image = decode_image(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!((image.width, image.height), (4, 2));
    assert_eq!(image.rgba.len(), 4 * 2 * 4);
    // First row in memory is the bottom row of the file
    assert_eq!(&image.rgba[0..4], &[0, 0, 255, 255]);
}

#[test]
fn test_get_or_load_from_file() {
    let path = write_png("load.png");
    let mut device = MockGraphicsDevice::new(800, 600);
    let mut cache = TextureCache::new();

    let texture = cache.get_or_load(&mut device, &path).unwrap();
    let again = cache.get_or_load(&mut device, &path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(Arc::ptr_eq(&texture, &again));
    assert_eq!(texture.width(), 4);
    assert_eq!(device.textures.len(), 1);
}

#[test]
fn test_missing_file_names_the_resource() {
    let mut device = MockGraphicsDevice::new(800, 600);
    let mut cache = TextureCache::new();
    let path = PathBuf::from("definitely/not/here.png");

    match cache.get_or_load(&mut device, &path) {
        Err(Error::ResourceLoad { resource, .. }) => assert!(resource.contains("here.png")),
        other => panic!("unexpected result: {:?}", other.map(|t| t.name().to_string())),
    }
    assert!(cache.is_empty());
}
