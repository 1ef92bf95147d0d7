use prodcalc_core::Field;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let key_width = Field::ALL.iter().map(|f| f.key().len()).max().unwrap_or(0);
    let label_width = Field::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);

    for field in Field::ALL {
        println!(
            "--{:<key_width$}  {:<label_width$}  {}",
            field.key(),
            field.label(),
            field.unit()
        );
    }
    Ok(())
}
