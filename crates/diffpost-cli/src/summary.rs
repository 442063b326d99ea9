use console::Style;
use diffpost_core::frame::Dimensions;
use diffpost_core::oracle::Verdict;
use diffpost_core::pipeline::config::PipelineConfig;
use diffpost_core::pipeline::PipelineReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    pass: Style,
    fail: Style,
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
            pass: Style::new().green().bold(),
            fail: Style::new().red().bold(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig, device_name: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("diffpost"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(&config.input)
    );
    match config.output {
        Some(ref path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.disabled.apply_to("not written")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Device"),
        s.method.apply_to(device_name)
    );
    println!();

    println!("  {}", s.header.apply_to("Posterize"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(config.dimensions)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("T1"),
        s.value.apply_to(config.thresholds.t1())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("T2"),
        s.value.apply_to(config.thresholds.t2())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(config.mode)
    );
    println!();

    if config.verify {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Verify"),
            s.method.apply_to("reference oracle")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Verify"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}

/// Per-stage execution times.
pub fn print_timings(report: &PipelineReport) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Key execution times"));
    for timing in &report.timings {
        println!(
            "    {:<26}{}",
            s.label.apply_to(timing.stage),
            s.value
                .apply_to(format!("{:.3} ms", timing.elapsed.as_secs_f64() * 1000.0))
        );
    }
    println!(
        "    {:<26}{}",
        s.label.apply_to("Total"),
        s.value.apply_to(format!(
            "{:.3} ms",
            report.total_elapsed().as_secs_f64() * 1000.0
        ))
    );
    println!();
}

/// Oracle outcome, with first-divergence detail on failure.
pub fn print_verdict(verdict: &Verdict, dims: Dimensions) {
    let s = Styles::new();

    match verdict {
        Verdict::Passed => println!("TEST {}", s.pass.apply_to("PASSED")),
        Verdict::Failed(m) => {
            let (row, col) = m.position(dims);
            println!("Error: result mismatch");
            println!(
                "  {:<10}{} (row {}, col {})",
                s.label.apply_to("Index"),
                s.value.apply_to(m.index),
                row,
                col
            );
            println!(
                "  {:<10}{}",
                s.label.apply_to("Expected"),
                s.value.apply_to(m.expected)
            );
            println!(
                "  {:<10}{}",
                s.label.apply_to("Actual"),
                s.value.apply_to(m.actual)
            );
            println!("TEST {}", s.fail.apply_to("FAILED"));
        }
    }
}
