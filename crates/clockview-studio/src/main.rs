//! Headless host for the clock widget.
//!
//! Attaches a `ClockView`, repaints into a `DrawList` on every tick and
//! reports what would be drawn. Useful for eyeballing styles and for checking
//! tick cadence without a windowing backend.

use std::str::FromStr;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use clockview_engine::logging::{init_logging, LoggingConfig};
use clockview_engine::scene::DrawCmd;
use clockview_ui::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "clockview-studio",
    about = "Run the analog clock without a window and report every tick."
)]
struct Args {
    /// Clock radius in logical pixels (defaults to 200)
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    radius: Option<f32>,

    /// Draw Roman numerals (same as `--numerals roman`)
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "numerals")]
    roman: bool,

    /// Numeral set: `arabic`, `roman`, or the codes `0`/`1`
    #[arg(long, value_name = "SET", value_parser = NumeralSet::from_str)]
    numerals: Option<NumeralSet>,

    /// Second hand color as a packed 0xAARRGGBB value
    #[arg(long, value_name = "ARGB", value_parser = parse_argb)]
    second_hand_color: Option<Color>,

    /// Number of ticks to report before detaching
    #[arg(long, value_name = "N", default_value_t = 5)]
    ticks: u32,

    /// Milliseconds between ticks
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,

    /// Log filter in `env_logger` syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

impl Args {
    fn numeral_set(&self) -> NumeralSet {
        match (self.roman, self.numerals) {
            (true, _) => NumeralSet::Roman,
            (false, set) => set.unwrap_or_default(),
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn style(&self) -> Result<ClockStyle> {
        let mut overrides = ClockStyle::builder().numeral_set(self.numeral_set());
        if let Some(r) = self.radius {
            overrides = overrides.radius(r);
        }
        if let Some(color) = self.second_hand_color {
            overrides = overrides.second_hand_color(color);
        }
        overrides.resolve().context("invalid clock style")
    }
}

/// Parses `0xAARRGGBB`, `#AARRGGBB` or bare hex digits.
fn parse_argb(s: &str) -> Result<Color> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    let argb = u32::from_str_radix(digits, 16).with_context(|| format!("bad ARGB color `{s}`"))?;
    Ok(Color::from_argb_u32(argb))
}

fn report(tick: u32, elapsed: Duration, frame: &ClockFrame, draw_list: &mut DrawList) {
    let (circles, lines, texts) = draw_list.shape_counts();
    println!(
        "  [{tick:>3}] +{:>6}ms  {}  hour {:>5.1}°  minute {:>5.1}°  second {:>5.1}°",
        elapsed.as_millis(),
        frame.time,
        frame.hand(HandKind::Hour).angle_degrees,
        frame.hand(HandKind::Minute).angle_degrees,
        frame.hand(HandKind::Second).angle_degrees,
    );
    println!("        {circles} circle, {lines} lines, {texts} glyphs");

    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Circle(c) => {
                log::trace!("z={:>2} dial r={:.1} at {:?}", item.key.z.0, c.radius, c.center)
            }
            DrawCmd::Line(l) => {
                log::trace!("z={:>2} hand {:?} -> {:?}", item.key.z.0, l.start, l.end)
            }
            DrawCmd::Text(t) => {
                log::trace!("z={:>2} glyph {:>4} at {:?}", item.key.z.0, t.text, t.anchor)
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let style = args.style()?;

    let mut clock = ClockView::with_ticker(style, ThreadTicker::with_interval(args.interval()));
    let (redraw_tx, redraw_rx) = mpsc::channel();
    clock.on_invalidate(move || {
        // The receiver outlives the clock; a send error only happens during shutdown.
        let _ = redraw_tx.send(());
    });

    let size = clock.measure(Constraints::unbounded());
    let bounds = Rect::from_origin_size(Vec2::zero(), size);
    let interval = clock.ticker_mut().interval();

    println!();
    println!(
        "  clockview studio: {}x{} px, {:?} numerals, {} ticks every {:?}",
        size.x,
        size.y,
        clock.style().numerals().set,
        args.ticks,
        interval,
    );
    println!();

    let started = Instant::now();
    clock.on_attach().context("failed to start clock")?;

    let mut draw_list = DrawList::new();
    for tick in 0..args.ticks {
        redraw_rx.recv_timeout(interval * 5).context("ticker stalled")?;

        draw_list.clear();
        clock.paint(&mut Painter::new(&mut draw_list), bounds);

        if let Some(frame) = clock.latest_frame() {
            report(tick, started.elapsed(), &frame, &mut draw_list);
        }
    }

    clock.on_detach();
    log::info!("studio finished after {:?}", started.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("clockview-studio").chain(list.iter().copied()))
    }

    // ── options ───────────────────────────────────────────────────────────

    #[test]
    fn no_arguments_gives_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.radius, None);
        assert_eq!(args.numeral_set(), NumeralSet::Arabic);
        assert_eq!(args.ticks, 5);
        assert_eq!(args.interval(), Duration::from_millis(1000));
        assert_eq!(args.log, None);
    }

    #[test]
    fn parses_every_option() {
        let args = parse(&[
            "--radius", "120", "--roman", "--ticks", "3", "--interval-ms", "250", "--log", "debug",
            "--second-hand-color", "0xFF0000FF",
        ])
        .unwrap();
        assert_eq!(args.radius, Some(120.0));
        assert_eq!(args.numeral_set(), NumeralSet::Roman);
        assert_eq!(args.ticks, 3);
        assert_eq!(args.interval(), Duration::from_millis(250));
        assert_eq!(args.log.as_deref(), Some("debug"));
        assert_eq!(args.second_hand_color, Some(Color::opaque(0.0, 0.0, 1.0)));
    }

    #[test]
    fn numerals_accepts_names_and_codes() {
        assert_eq!(parse(&["--numerals", "Roman"]).unwrap().numeral_set(), NumeralSet::Roman);
        assert_eq!(parse(&["--numerals", "0"]).unwrap().numeral_set(), NumeralSet::Arabic);
        assert!(parse(&["--numerals", "klingon"]).is_err());
    }

    #[test]
    fn roman_conflicts_with_numerals() {
        assert!(parse(&["--roman", "--numerals", "arabic"]).is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--radius"]).is_err());
        assert!(parse(&["--ticks", "many"]).is_err());
        assert!(parse(&["--interval-ms", "0"]).is_err());
        assert!(parse(&["--second-hand-color", "0xZZ"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn help_lists_every_option() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let help = err.to_string();
        for flag in ["--radius", "--roman", "--numerals", "--ticks", "--interval-ms", "--log"] {
            assert!(help.contains(flag), "help is missing {flag}");
        }
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[test]
    fn negative_radius_fails_style_resolution() {
        let args = parse(&["--radius", "-5"]).unwrap();
        assert!(args.style().is_err());
    }

    #[test]
    fn second_hand_color_reaches_the_style() {
        let args = parse(&["--second-hand-color", "#FF000000"]).unwrap();
        assert_eq!(args.style().unwrap().second_hand().color, Color::BLACK);
    }

    #[test]
    fn argb_prefixes() {
        assert_eq!(parse_argb("FFFF0000").unwrap(), Color::RED);
        assert_eq!(parse_argb("0xff000000").unwrap(), Color::BLACK);
        assert!(parse_argb("").is_err());
    }
}
