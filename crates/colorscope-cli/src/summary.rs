use console::Style;
use colorscope_core::pipeline::config::SessionConfig;
use colorscope_core::pipeline::SessionOutput;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_session_summary(config: &SessionConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Colorscope Session"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixel format"),
        s.method.apply_to(config.pixel_format)
    );
    if let Some(size) = config.size {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Frame size"),
            s.value.apply_to(size)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Sampling"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Space"),
        s.method.apply_to(config.sampling.color_space)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Filter"),
        s.method.apply_to(config.sampling.strategy)
    );
    if config.regions.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Regions"),
            s.disabled.apply_to("none")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Regions"),
            s.value.apply_to(config.regions.len())
        );
    }
    println!();
}

/// Tab-separated table: channel names, then one row per sample.
pub fn print_samples(output: &SessionOutput) {
    let s = Styles::new();
    let names = output.samples.space().channel_names();

    println!("{}", s.header.apply_to(names.join("\t")));
    for sample in &output.sampled {
        let [a, b, c] = sample.color;
        println!("{a}\t{b}\t{c}");
    }
    for region in &output.skipped {
        println!(
            "{}",
            s.disabled.apply_to(format!("skipped {region}"))
        );
    }
}
