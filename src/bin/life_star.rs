use anyhow::{bail, Context, Result};
use serde::Serialize;
use ziwei_rust::{resolve_chart, BirthInput, LifeChart, LunisolarCalendar};

#[derive(Serialize)]
struct Output {
    star: String,
    #[serde(flatten)]
    chart: LifeChart,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("usage: life-star <year> <month> <day> <hour-branch 0-11>");
    }

    let year: i32 = args[0].parse().context("year must be an integer")?;
    let month: u32 = args[1].parse().context("month must be an integer")?;
    let day: u32 = args[2].parse().context("day must be an integer")?;
    let hour_branch: u8 = args[3]
        .parse()
        .context("hour branch must be an integer in 0..=11")?;

    let birth = BirthInput::from_raw(year, month, day, hour_branch)?;
    let chart = resolve_chart(&LunisolarCalendar, &birth)?;

    let output = Output {
        star: chart.star_label(),
        chart,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
