//! Display implementations for models

use super::config::MapConfig;
use super::merged::MergedTable;

impl MapConfig {
    pub fn pretty_print(&self) {
        println!("MapConfig {{");
        println!("    dataset: {{");
        println!("        value_column: {:?},", self.dataset.value_column);
        println!("        key_column: {:?},", self.dataset.key_column);
        println!("    }},");
        println!("    reference: {{");
        println!("        cantons: {:?},", self.reference.cantons);
        println!("        geometry: {:?},", self.reference.geometry);
        println!(
            "        geometry_object: {:?},",
            self.reference.geometry_object
        );
        println!("    }},");
        println!("    map: {{");
        println!("        palette: {:?},", self.map.palette);
        println!("        scale: {:?},", self.map.scale);
        println!("        fill_opacity: {},", self.map.fill_opacity);
        println!("        line_opacity: {},", self.map.line_opacity);
        println!("        center: {:?},", self.map.center);
        println!("        zoom: {},", self.map.zoom);
        println!("        legend: {:?},", self.map.legend);
        println!("    }},");
        println!("    join: {:?},", self.join);
        println!("    output: {:?},", self.output);
        println!("}}");
    }
}

impl MergedTable {
    pub fn pretty_print(&self) {
        let code_width = 6;
        let name_width = self
            .iter()
            .map(|row| row.canton.name.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        println!(
            "{:<code_width$} {:<name_width$} {:>12}",
            "Code", "Name", "Value"
        );
        for row in self {
            println!(
                "{:<code_width$} {:<name_width$} {:>12}",
                row.canton.code, row.canton.name, row.value
            );
        }
        println!("({} rows)", self.len());
    }
}
