use location_card::card::format_fix;
use location_card::error::RenderError;
use location_card::fix::LocationFix;
use location_card::render::write_card;
use std::io::{self, Write};

/// Whether the environment reports speed and bearing accuracy. The library
/// takes this as an injected flag; the demo hardcodes a supporting
/// environment.
const ACCURACY_SUPPORTED: bool = true;

/// Illustrative fix shown by the demo. The accuracy fields are only set
/// when the environment would report them.
fn demo_fix(accuracy_supported: bool) -> LocationFix {
    LocationFix::builder()
        .latitude(28.92973474)
        .longitude(-87.4345494)
        .time(1_633_375_741_711)
        .altitude(13.5)
        .speed(21.5)
        .bearing(240.0)
        .accuracy(123.0)
        .maybe_speed_accuracy(accuracy_supported.then_some(1.0))
        .maybe_bearing_accuracy(accuracy_supported.then_some(2.0))
        .build()
}

fn main() -> Result<(), RenderError> {
    let fix = demo_fix(ACCURACY_SUPPORTED);
    let card = format_fix(&fix, ACCURACY_SUPPORTED);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_card(&card, true, &mut out)?;
    if let Some(datetime) = fix.datetime_utc() {
        writeln!(out, "\nfix time (UTC): {datetime}")?;
    }
    Ok(())
}
