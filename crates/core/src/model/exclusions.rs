/// Entry points permanently left out of every count: stubs that are not real
/// system calls, and calls a test process cannot safely make and survive.
const EXCLUDED_ENTRY_POINTS: &[&str] = &[
    "ni_syscall",
    "exit",
    "exit_group",
    "rt_sigreturn",
    "sigreturn",
    "restart_syscall",
    "reboot",
    "kexec_load",
    "kexec_file_load",
    "vhangup",
    "pivot_root",
    "swapoff",
    "swapon",
    "init_module",
    "finit_module",
    "delete_module",
];

/// The fixed, ordered exclusion list. Applied before any discovery.
pub fn exclusions() -> &'static [&'static str] {
    EXCLUDED_ENTRY_POINTS
}
