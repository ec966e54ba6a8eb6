// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_spec_content(subpackages: usize) -> String {
    let mut content = String::from(
        "Name: bench\nVersion: 1.0\nRelease: 1%{?dist}\nSummary: Benchmark package\n\n%description\nBenchmark.\n\n%prep\n%setup -q\n\n%build\n%if 0%{?fedora}\nmake %{?_smp_mflags}\n%endif\n\n%install\nmake install DESTDIR=%{buildroot}\n\n",
    );

    for i in 0..subpackages {
        content.push_str(&format!(
            "%package sub{i}\nSummary: Subpackage {i}\n\n%description sub{i}\nSubpackage {i}.\n\n%post sub{i} -p /sbin/ldconfig\n\n%files sub{i} -f sub{i}.list\n%{{_libdir}}/sub{i}/*.so\n%doc README.sub{i}\n\n"
        ));
    }

    content.push_str("%changelog\n* Mon Jan 01 2024 Bench <bench@example.com> - 1.0-1\n- Initial\n");
    content
}
