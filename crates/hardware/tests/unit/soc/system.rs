//! Store routing through the system and display flushes.

use std::cell::RefCell;
use std::rc::Rc;

use minirv_core::config::Config;
use minirv_core::soc::devices::{Framebuffer, HeadlessDisplay};
use minirv_core::soc::traits::DisplaySink;
use minirv_core::soc::{StoreTarget, System};
use pretty_assertions::assert_eq;

use crate::common::mocks::display::MockDisplay;

fn config() -> Config {
    let mut config = Config::default();
    config.system.ram_size = 0x1000;
    config
}

#[test]
fn word_store_in_window_presents_once_and_skips_memory() {
    let mut display = MockDisplay::new();
    display.expect_present().times(1).return_const(());
    let mut sys = System::new(&config(), Box::new(display)).unwrap();

    let target = sys.store_word(0x2000_0004, 0xFF);

    assert_eq!(target, StoreTarget::Pixel { row: 0, col: 1 });
    assert_eq!(sys.framebuffer.pixel(0, 1), 0xFF);
    assert!(sys.memory.words().iter().all(|&w| w == 0));
    assert_eq!(sys.frames_presented(), 1);
}

#[test]
fn word_store_outside_window_never_presents() {
    let mut display = MockDisplay::new();
    display.expect_present().times(0);
    let mut sys = System::new(&config(), Box::new(display)).unwrap();

    assert_eq!(
        sys.store_word(0x2004_0000, 1),
        StoreTarget::Memory { addr: 0 }
    );
    sys.store_byte(0x2000_0000, 2);
    assert_eq!(sys.memory.read_word(0), 2);
    assert_eq!(sys.frames_presented(), 0);
}

#[test]
fn display_receives_the_updated_frame() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let seen = Rc::clone(&seen);
        move |frame: &Framebuffer| seen.borrow_mut().push(frame.pixel(3, 4))
    };
    let mut sys = System::new(&config(), Box::new(sink)).unwrap();

    let _ = sys.store_word(0x2000_0C10, 0xAA);
    let _ = sys.store_word(0x2000_0C10, 0xBB);

    assert_eq!(*seen.borrow(), vec![0xAA, 0xBB]);
}

#[test]
fn relocated_window_follows_configuration() {
    let mut config = config();
    config.system.framebuffer_base = 0x4000_0000;
    let mut sys = System::headless(&config).unwrap();

    assert_eq!(
        sys.store_word(0x4000_0004, 9),
        StoreTarget::Pixel { row: 0, col: 1 }
    );
    assert!(matches!(
        sys.store_word(0x2000_0004, 9),
        StoreTarget::Memory { .. }
    ));
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut config = config();
    config.system.ram_size = 3;
    assert!(System::headless(&config).is_err());
}

#[test]
fn headless_display_keeps_last_frame() {
    let mut display = HeadlessDisplay::new();
    let mut fb = Framebuffer::new(0x2000_0000);
    let _ = fb.write(0x2000_0000, 1);
    display.present(&fb);
    let _ = fb.write(0x2000_0000, 2);
    display.present(&fb);

    assert_eq!(display.frames(), 2);
    assert_eq!(display.last_frame().map(|f| f.pixel(0, 0)), Some(2));
}
