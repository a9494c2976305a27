use crate::workflow::runner::SessionSummary;
use labcore::model::{Material, Terrain};

/// Renders the averages table the way the page does: one row per terrain,
/// one column per material, two decimal places.
pub fn table_lines(summary: &SessionSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!(
        "{:<16} {:>16} {:>16} {:>16}",
        "Terrain Type",
        Material::One.label(),
        Material::Two.label(),
        Material::Three.label(),
    ));
    for terrain in Terrain::ALL {
        let row = summary.averages.row(terrain);
        lines.push(format!(
            "{:<16} {:>16.2} {:>16.2} {:>16.2}",
            terrain.label(),
            row[0],
            row[1],
            row[2],
        ));
    }
    lines
}

pub fn print_summary(summary: &SessionSummary) {
    for line in table_lines(summary) {
        println!("{}", line);
    }
    println!();
    println!("Acceleration: {:.2}", summary.results.acceleration);
    println!("Distance:     {:.2}", summary.results.distance);
    println!("Revolutions:  {:.2}", summary.results.revolutions);
    println!(
        "Trial average over {} trials: {:.2}",
        summary.trial_count, summary.trial_average
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::SessionConfig;
    use crate::workflow::runner::Runner;

    #[test]
    fn table_renders_two_decimal_cells() {
        let mut config = SessionConfig::default();
        config.readings.terrain1.material2 = "0.456".into();
        let summary = Runner::new(config).execute().unwrap();

        let lines = table_lines(&summary);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Material Type 3"));
        assert!(lines[1].contains("0.46"));
        assert!(lines[2].contains("0.00"));
    }
}
