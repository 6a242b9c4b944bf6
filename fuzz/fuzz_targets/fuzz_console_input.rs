#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use quickbite::{Console, DisplayConfig, MenuCatalog, MenuItem, Session};
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    // Any keyboard input ends in Ok or Err, never a panic
    let menu = MenuCatalog::new(vec![MenuItem::new(1, "Pizza", Decimal::new(1000, 2))]);
    let mut session = Session::new(menu, Vec::new(), Vec::new());
    let mut console = Console::new(Cursor::new(data), Vec::new(), DisplayConfig::default());
    let _ = console.run(&mut session);
});
