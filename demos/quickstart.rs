use qamar::{
    annotate, CalculationMethod, Coordinates, DateComponents, PrayerTimeApi, QiblaFinder,
    SystemTimeZone, TimeFormat,
};

fn main() -> qamar::Result<()> {
    let api = PrayerTimeApi::new(SystemTimeZone).with_config(|c| {
        c.with_method(CalculationMethod::Mwl)
            .with_time_format(TimeFormat::Time12)
    });

    let date = DateComponents::new(2025, 6, 15)?;
    let times = api.prayer_times(&date, 51.5074, -0.1278)?;
    println!("London ({}):\n{times}", CalculationMethod::Mwl);

    let london = Coordinates::new(51.5074, -0.1278)?;
    if let Some(state) = QiblaFinder::new(london, 115.0).alignment() {
        println!(
            "Qibla {:.2}°, heading {:.0}°, aligned: {}",
            state.direction, state.current_azimuth, state.is_aligned
        );
    }

    let verse = "\u{0625}\u{0650}\u{0646}\u{0651}\u{064E} \u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{064E}";
    for span in annotate(verse) {
        println!("{:>12} {:?} {}", span.rule, span.range(), span.text(verse));
    }
    Ok(())
}
