use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use folio::{
    FolioConfig, Page, Site,
    app::STYLESHEET,
    contact::{self, Field, SimulatedTransport, StatusKind},
    view::LinkStyle,
};
use folio_ui::{
    Element, ElementKind, ElementTree, HoverTarget, ManualFrameClock, MarkerStyle,
    MountedFollower, NodeId, PointerHub, PxPosition,
};
use tracing::{debug, info};

use crate::output;

const STYLESHEET_FILE: &str = "site.css";
const SETTLE_EPSILON: f64 = 1e-9;
const SETTLE_LIMIT: usize = 10_000;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Portfolio site: static export, page rendering and pointer-follower traces", long_about = None)]
pub struct Cli {
    /// Config file path (defaults to built-in values)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write every page as a static HTML document, plus the stylesheet
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print one page's markup
    Render {
        /// Page slug (home, about, experience, projects, contact)
        page: String,
        /// Print a complete document instead of the page alone
        #[arg(long)]
        document: bool,
    },
    /// Run the pointer follower headless and print the marker every tick
    Trace {
        /// Pointer position the follower chases, as X,Y
        #[arg(long)]
        to: Point,
        /// Where the marker rests before the move, as X,Y
        #[arg(long, default_value = "0,0")]
        from: Point,
        /// Number of ticks to print
        #[arg(long, default_value_t = 20)]
        ticks: usize,
        /// Element under the pointer
        #[arg(long, value_enum, default_value_t = OverKind::Page)]
        over: OverKind,
    },
    /// Submit the contact form through the simulated transport
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        mobile: String,
        #[arg(long)]
        message: String,
    },
}

/// `X,Y` in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Point(PxPosition);

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
        };
        Ok(Point(PxPosition::new(parse(x)?, parse(y)?)))
    }
}

/// Kinds of element the trace can hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverKind {
    /// Plain page content
    Page,
    Link,
    Button,
    Input,
    Textarea,
    /// A decorative icon nested inside a link
    Icon,
}

impl OverKind {
    /// Builds a one-off tree holding the hovered element and returns its node.
    fn build(self, tree: &mut ElementTree) -> NodeId {
        tree.add_node(Element::new(ElementKind::Div).class("page"));
        let target = match self {
            OverKind::Page => tree.leaf(Element::new(ElementKind::Paragraph)),
            OverKind::Link => tree.leaf(Element::new(ElementKind::Anchor)),
            OverKind::Button => tree.leaf(Element::new(ElementKind::Button)),
            OverKind::Input => tree.leaf(Element::new(ElementKind::Input)),
            OverKind::Textarea => tree.leaf(Element::new(ElementKind::TextArea)),
            OverKind::Icon => {
                tree.add_node(Element::new(ElementKind::Anchor));
                let icon = tree.leaf(Element::new(ElementKind::Span).class("icon"));
                tree.pop_node();
                icon
            }
        };
        tree.pop_node();
        target
    }
}

pub fn run(cli: Cli, config: &FolioConfig) -> Result<()> {
    match cli.command {
        Command::Export { out } => export(&out),
        Command::Render { page, document } => {
            render(&page, document);
            Ok(())
        }
        Command::Trace {
            to,
            from,
            ticks,
            over,
        } => {
            trace(config, from.0, to.0, ticks, over);
            Ok(())
        }
        Command::Contact {
            name,
            email,
            mobile,
            message,
        } => submit_contact(config, [name, email, mobile, message]),
    }
}

fn export(out: &Path) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;

    let write = |file_name: &str, contents: &str| -> Result<()> {
        let path = out.join(file_name);
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    };

    let mut written = 0;
    for page in Page::ALL {
        let document = Site::on_page(page, LinkStyle::Documents).document(STYLESHEET_FILE);
        let file_name = LinkStyle::Documents.href(page);
        write(&file_name, &document)?;
        output::status("Rendered", format!("{page} -> {file_name}"));
        written += 1;
        if page == Page::Home {
            // Home is reachable both as the index and by its slug.
            write(&page.file_name(), &document)?;
            written += 1;
        }
    }
    write(STYLESHEET_FILE, STYLESHEET)?;
    written += 1;

    output::status("Exported", format!("{written} files to {}", out.display()));
    info!(out = %out.display(), files = written, "export finished");
    Ok(())
}

fn render(slug: &str, document: bool) {
    let page = Page::from_slug(slug);
    if page.slug() != slug {
        output::warn(format!("unknown page `{slug}`, rendering {page}"));
    }
    let site = Site::on_page(page, LinkStyle::Documents);
    if document {
        print!("{}", site.document(STYLESHEET_FILE));
    } else {
        println!("{}", site.page_html());
    }
}

/// Drives a mounted follower on a manual clock and returns the marker after each printed tick.
pub fn trace_markers(
    config: &FolioConfig,
    from: PxPosition,
    to: PxPosition,
    ticks: usize,
    over: OverKind,
) -> Vec<MarkerStyle> {
    let hub = PointerHub::new();
    let clock = Rc::new(ManualFrameClock::new());
    let markers = Rc::new(RefCell::new(Vec::with_capacity(ticks)));
    let sink = markers.clone();
    let mounted = MountedFollower::mount(&hub, clock.clone(), config.follower(), move |m: &MarkerStyle| {
        sink.borrow_mut().push(*m)
    });

    if from != PxPosition::ZERO {
        hub.dispatch_move(from);
        let mut settle = 0;
        while mounted.state().current.max_axis_distance(from) >= SETTLE_EPSILON && settle < SETTLE_LIMIT {
            clock.advance();
            settle += 1;
        }
        debug!(ticks = settle, "settled at start position");
    }
    markers.borrow_mut().clear();

    let mut tree = ElementTree::new();
    let target = over.build(&mut tree);
    let node = tree.node(target);
    debug!(?over, interactive = node.is_within_interactive(), "pointer over");
    hub.dispatch_over(&node);
    hub.dispatch_move(to);
    clock.advance_by(ticks);

    mounted.unmount();
    markers.take()
}

fn trace(config: &FolioConfig, from: PxPosition, to: PxPosition, ticks: usize, over: OverKind) {
    for (n, marker) in trace_markers(config, from, to, ticks, over).iter().enumerate() {
        println!(
            "tick={} x={:.4} y={:.4} scale={}",
            n + 1,
            marker.position.x,
            marker.position.y,
            marker.scale
        );
    }
}

fn submit_contact(config: &FolioConfig, values: [String; 4]) -> Result<()> {
    let mut site = Site::on_page(Page::Contact, LinkStyle::Documents);
    for (field, value) in Field::ALL.into_iter().zip(values) {
        site.contact_mut().set_field(field, value);
    }
    if let Some(field) = site.contact().missing_field() {
        bail!("`--{field}` must not be empty");
    }

    let form = RefCell::new(site.contact().clone());
    let transport = SimulatedTransport::new(config.simulated_delay());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start runtime")?;

    output::status("Sending", format!("simulated delay {:?}", transport.delay()));
    let outcome = runtime.block_on(contact::submit(&form, &transport));
    *site.contact_mut() = form.into_inner();

    match (outcome, site.contact().status()) {
        (Ok(()), Some(status)) if status.kind == StatusKind::Success => {
            output::status("Sent", &status.message);
            Ok(())
        }
        (Err(err), _) => Err(err).context("contact submission failed"),
        (Ok(()), _) => {
            output::warn("submission finished without a status");
            Ok(())
        }
    }
}
