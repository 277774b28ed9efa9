use chamados_core::error::ChamadosError;
use chamados_core::model::Column;
use chamados_core::normalize::columns;

/// Print the canonical schema and the accepted source header spellings.
pub fn run() -> Result<(), ChamadosError> {
    let max_header = Column::ALL
        .iter()
        .map(|c| c.header().chars().count())
        .max()
        .unwrap_or(0);

    println!("Canonical columns (in order):\n");
    for col in Column::ALL {
        let aliases = columns::aliases_for(col);
        println!(
            "  {:<width$}  accepts: {}",
            col.header(),
            aliases.join(", "),
            width = max_header
        );
    }
    println!("\nMatching ignores case, accents and spacing.");
    Ok(())
}
