#![cfg(feature = "diagnostic")]

use std::sync::Mutex;

use bus_space::{BusSpace, BusSpaceOps, MapFlags};
use log::{Level, LevelFilter, Log, Metadata, Record};
use mipsaddr::{pa, va};

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_ignored_cacheable_is_reported() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let bs = BusSpace::new("vme", pa!(0x6000_0000), va!(0xc000_0000), 0, 0x1000);
    let h = bs.map(0x40, 4, MapFlags::CACHEABLE).unwrap();
    assert_eq!(h, va!(0xc000_0040));

    // Cacheable kseg1 requests are honoured and stay quiet.
    let obio = BusSpace::new("obio", pa!(0), va!(0xa000_0000), 0, 0x1000);
    assert_eq!(obio.map(0x40, 4, MapFlags::CACHEABLE), Ok(va!(0x8000_0040)));

    let lines = LOGGER.lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("vme"));
    assert!(lines[0].contains("ignore cacheable"));
}
