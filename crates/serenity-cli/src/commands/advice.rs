use clap::Args;
use serenity_application::ReligiousAdviceUseCase;
use serenity_core::user::UserProfile;

#[derive(Args)]
pub struct AdviceArgs {
    #[arg(long)]
    religion: String,
    /// Topic, lesson, concept, location or issue, depending on the command
    tag: String,
}

#[derive(Debug, Clone, Copy)]
pub enum LookupKind {
    Quotes,
    Stories,
    Teachings,
    Resources,
    Groups,
}

pub fn advice(religion: &str, issue: &str) {
    let profile = UserProfile::new("cli", "", "").with_religion(religion);
    println!("{}", ReligiousAdviceUseCase::new().provide_religious_advice(&profile, issue));
}

pub fn practices(religion: &str, mood: i32) {
    print_list(&ReligiousAdviceUseCase::new().suggest_spiritual_practices(religion, mood));
}

pub fn lookup(kind: LookupKind, args: &AdviceArgs) {
    let usecase = ReligiousAdviceUseCase::new();
    let entries = match kind {
        LookupKind::Quotes => usecase.get_religious_quotes(&args.religion, &args.tag),
        LookupKind::Stories => usecase.get_religious_stories(&args.religion, &args.tag),
        LookupKind::Teachings => usecase.get_religious_teachings(&args.religion, &args.tag),
        LookupKind::Resources => {
            usecase.get_religious_community_resources(&args.religion, &args.tag)
        }
        LookupKind::Groups => usecase.get_religious_support_groups(&args.religion, &args.tag),
    };
    print_list(&entries);
}

fn print_list(entries: &[String]) {
    for entry in entries {
        println!("- {entry}");
    }
}
