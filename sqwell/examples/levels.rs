use sqwell::{ solve::System, utils, well::Well };

// compare forward-integrated square well states against the analytic solution

fn main() {
    const N_MAX: usize = 6;
    const STEP: f64 = 1e-4;

    let sys = System::new(Well::default(), STEP).unwrap();
    let spectrum = sys.solve(N_MAX).unwrap();
    println!("samples per level: {}", sys.sample_count());

    for (level, wf) in spectrum.iter() {
        let nodes = wf.nodes().unwrap();
        let worst
            = nodes.iter().enumerate()
            .map(|(k, xk)| (xk - (k + 1) as f64 / level.n as f64).abs())
            .fold(0.0_f64, f64::max);
        println!(
            "n = {}: E = {:9.4}, nodes = {} (max offset {:.2e}), \
            far-wall mismatch = {:.2e}",
            level.n, level.e, nodes.len(), worst, wf.boundary_mismatch(),
        );
    }

    // neighboring levels should be nearly orthogonal
    let wfs = spectrum.wavefunctions();
    for (q, p) in wfs.iter().zip(wfs.iter().skip(1)) {
        println!("overlap: {:+.2e}", utils::wf_dot(&q.psi, &p.psi, STEP));
    }
}
