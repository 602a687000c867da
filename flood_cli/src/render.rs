//! Plain-text rendering of calculation and BOM reports.

use flood_core::agents::{AgentCatalog, DESIGN_REFERENCES};
use flood_core::bom::{BomItem, BomReport};
use flood_core::calculations::{CalculationSummary, RoomFailure};
use flood_core::project::Project;

const WIDE_RULE: usize = 110;
const RULE: usize = 85;
const BOM_RULE: usize = 90;

pub fn calculation_report(project: &Project, summary: &CalculationSummary) -> String {
    let mut out = String::new();
    out.push_str("Clean Agent Fire Suppression Calculation Report\n");
    out.push_str(&format!(
        "Job: {}  Client: {}  Engineer: {}\n",
        project.meta.job_id, project.meta.client, project.meta.engineer
    ));
    out.push_str(&format!("Date: {}\n", report_date(project)));

    for group in &summary.groups {
        out.push_str(&format!("\nAGENT: {}\n", group.agent));
        out.push_str(&format!(
            "{:<14}{:>8}  {:>7}  {:>7}  {:>5}  {:>5}  {:>12}\n",
            "Room", "Vol(m³)", "Design%", "Factor", "AltC", "TmpC", "Req (kg)"
        ));
        out.push_str(&rule(RULE));
        for calc in &group.rooms {
            let r = &calc.result;
            out.push_str(&format!(
                "{:<14}{:>8.2}  {:>7.2}  {:>7.3}  {:>5.2}  {:>5.2}  {:>12.2}\n",
                calc.room,
                r.volume_m3,
                calc.design_concentration,
                r.factor,
                r.altitude_corr,
                r.temp_corr,
                r.required_mass_kg
            ));
        }
        out.push_str(&rule(RULE));
        out.push_str(&format!(
            "{:<62}{:>12.2} kg\n",
            format!("Total for {}", group.agent),
            group.subtotal_kg
        ));
    }

    out.push('\n');
    out.push_str(&rule(WIDE_RULE));
    out.push_str(&format!(
        "{:<62}{:>12.2} kg\n",
        "Grand Total (all agents)", summary.grand_total_kg
    ));

    push_failures(&mut out, &summary.failures);

    out.push_str("\nReferences:\n");
    for reference in DESIGN_REFERENCES.iter() {
        out.push_str(&format!("  {}: {}\n", reference.title, reference.url));
    }
    out
}

pub fn bom_report(report: &BomReport) -> String {
    let mut out = String::new();
    out.push_str("========= Room-by-Room BOM =========\n");

    for entry in &report.entries {
        match (&entry.oem, &entry.vendor) {
            (Some(oem), Some(vendor)) if oem != vendor => out.push_str(&format!(
                "\nRoom: {} (Agent: {}, OEM: {}, parts from {})\n",
                entry.room, entry.agent, oem, vendor
            )),
            (Some(oem), _) => out.push_str(&format!(
                "\nRoom: {} (Agent: {}, OEM: {})\n",
                entry.room, entry.agent, oem
            )),
            (None, _) => out.push_str(&format!("\nRoom: {} (Agent: {})\n", entry.room, entry.agent)),
        }
        push_bom_table(&mut out, &entry.items);
    }

    out.push_str("\n========= Project BOM (Total) =========\n");
    let totals: Vec<BomItem> = report.project.items().cloned().collect();
    push_bom_table(&mut out, &totals);

    push_failures(&mut out, &report.failures);
    out
}

pub fn agent_list(catalog: &AgentCatalog) -> String {
    let mut out = String::new();
    for agent in catalog.iter() {
        out.push_str(&format!("{} [{}]\n", agent.name, agent.family.display_name()));
        out.push_str(&format!(
            "  defaults: {:.2}% design, {:.1} °C, {:.0} m\n",
            agent.defaults.design_concentration, agent.defaults.temperature, agent.defaults.altitude
        ));
        for point in agent.table.breakpoints() {
            out.push_str(&format!(
                "  {:>6.2}%  {:>6.3} kg/m³\n",
                point.concentration_pct, point.factor_kg_m3
            ));
        }
    }
    out
}

fn push_bom_table(out: &mut String, items: &[BomItem]) {
    out.push_str(&format!(
        "{:<15} | {:<50} | {:>5} | {:<4}\n",
        "Part Number", "Description", "Qty", "Unit"
    ));
    out.push_str(&rule(BOM_RULE));
    for item in items {
        let qty = item.qty.map(|q| q.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{:<15} | {:<50} | {:>5} | {:<4}\n",
            item.part_number, item.description, qty, item.unit
        ));
    }
}

fn push_failures(out: &mut String, failures: &[RoomFailure]) {
    if failures.is_empty() {
        return;
    }
    out.push_str("\nRooms not calculated:\n");
    for failure in failures {
        out.push_str(&format!(
            "  {} [{}] {}\n",
            failure.room,
            failure.error.error_code(),
            failure.error
        ));
    }
}

fn report_date(project: &Project) -> String {
    project.meta.modified.format("%Y-%m-%d").to_string()
}

fn rule(width: usize) -> String {
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}
