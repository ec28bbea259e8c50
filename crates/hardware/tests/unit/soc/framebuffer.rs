//! Pixel framebuffer addressing and export.

use minirv_core::soc::devices::Framebuffer;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x2000_0000, (0, 0))]
#[case(0x2000_0004, (0, 1))]
#[case(0x2000_03FC, (0, 255))]
#[case(0x2000_0400, (1, 0))]
#[case(0x2003_FFFC, (255, 255))]
#[case(0x2000_0007, (0, 1))]
fn window_offsets_map_to_coordinates(#[case] addr: u32, #[case] expected: (usize, usize)) {
    let fb = Framebuffer::new(0x2000_0000);
    assert!(fb.contains(addr));
    assert_eq!(fb.coords(addr), expected);
}

#[rstest]
#[case(0x1FFF_FFFC)]
#[case(0x2004_0000)]
#[case(0x0000_0000)]
#[case(0xFFFF_FFFC)]
fn addresses_outside_window_are_not_contained(#[case] addr: u32) {
    assert!(!Framebuffer::new(0x2000_0000).contains(addr));
}

#[test]
fn write_sets_exactly_one_pixel() {
    let mut fb = Framebuffer::new(0x2000_0000);
    assert_eq!(fb.write(0x2000_0808, 0x00FF_0000), (2, 2));
    assert_eq!(fb.pixel(2, 2), 0x00FF_0000);
    assert_eq!(fb.pixels().iter().filter(|&&p| p != 0).count(), 1);
    assert_eq!(fb.rows().count(), 256);
}

#[test]
fn ppm_export_has_header_and_rgb_triples() {
    let mut fb = Framebuffer::new(0x2000_0000);
    let _ = fb.write(0x2000_0000, 0x0012_3456);
    let ppm = fb.to_ppm();

    let header = b"P6\n256 256\n255\n";
    assert_eq!(&ppm[..header.len()], header);
    assert_eq!(ppm.len(), header.len() + 256 * 256 * 3);
    assert_eq!(&ppm[header.len()..header.len() + 6], &[0x12, 0x34, 0x56, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn pixel_outside_grid_panics() {
    let _ = Framebuffer::new(0x2000_0000).pixel(256, 0);
}
