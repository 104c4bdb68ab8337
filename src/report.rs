use crate::repo::RepoRef;
use crate::tracker::Issue;

pub const NOT_FOUND_NOTICE: &str = "Unable to find a good issue to suggest :( try perusing the repository with `gh issue list`.";

pub fn render_found(repo: &RepoRef, issue: &Issue) -> String {
    let number = issue.number;
    format!(
        "A good issue to work on in {repo} might be...\n\n\
         Issue #{number}: {title}\n\n\
         You can check out the issue with `gh issue view -R{repo} {number}`\n\
         Or express interest in working on it: `gh issue comment -R{repo} {number} -b\"Hi! I'm interested in working on this\"`\n\n\
         View this issue on the web: {url}\n",
        title = issue.title,
        url = issue.url,
    )
}

pub fn render_not_found() -> String {
    format!("{NOT_FOUND_NOTICE}\n")
}
