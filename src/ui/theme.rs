//! Mode-specific theme helpers for consistent styling across pages.

use crate::domain::Mode;

pub fn btn_primary(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
        Mode::Mixed => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-white hover:bg-amber-400",
        Mode::Parallel => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
    }
}

pub fn input_class(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Mode::Mixed => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-amber-500 focus:outline-none",
        Mode::Parallel => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
    }
}

pub fn panel_border(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
        Mode::Mixed => "rounded-xl border border-amber-800/50 bg-slate-900/40",
        Mode::Parallel => "rounded-xl border border-sky-800/50 bg-slate-900/40",
    }
}

pub fn table_container(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "rounded-xl border border-emerald-900/40 bg-slate-900/40 overflow-hidden",
        Mode::Mixed => "rounded-xl border border-amber-900/40 bg-slate-900/40 overflow-hidden",
        Mode::Parallel => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
        Mode::Mixed => "border-b border-amber-900/40 bg-amber-950/30 text-xs uppercase text-amber-400/70",
        Mode::Parallel => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
    }
}

pub fn table_divider(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "divide-y divide-emerald-900/30",
        Mode::Mixed => "divide-y divide-amber-900/30",
        Mode::Parallel => "divide-y divide-sky-900/30",
    }
}

pub fn accent_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Stable => "text-emerald-300",
        Mode::Mixed => "text-amber-300",
        Mode::Parallel => "text-sky-300",
    }
}

pub fn label_class(_mode: Mode) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn text_secondary(_mode: Mode) -> &'static str {
    "text-slate-300"
}

pub fn text_muted(_mode: Mode) -> &'static str {
    "text-slate-500"
}
