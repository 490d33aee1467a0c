//! 测试用 Mikan 页面片段

pub const DETAIL_PAGE: &str = r##"<!DOCTYPE html>
<html>
<body>
<div class="pull-left leftbar-container">
    <ul class="list-unstyled">
        <li class="leftbar-item">
            <span><a class="subgroup-name subgroup-100" data-anchor="#100">桜都字幕组</a></span>
            <span class="date">周五</span>
        </li>
        <li class="leftbar-item">
            <span><a class="subgroup-name subgroup-209" data-anchor="#209">LoliHouse</a></span>
            <span class="date">周六</span>
        </li>
        <li class="leftbar-item">
            <span><a class="subgroup-name subgroup-310" data-anchor=" #310 ">喵萌奶茶屋</a></span>
            <span class="date">周日</span>
        </li>
        <li class="leftbar-item">
            <span><a class="subgroup-name">无锚点字幕组</a></span>
        </li>
    </ul>
</div>
<div class="pull-left central-container">
    <div class="content">
        <img src="/images/Bangumi/202309/cover.jpg" />
        <p class="bangumi-title">葬送的芙莉莲</p>
        <p class="bangumi-info">放送开始：2023/9/29</p>
        <p class="bangumi-info">官方网站：<a href="https://frieren-anime.jp/">https://frieren-anime.jp/</a></p>
        <p class="bangumi-info">Bangumi番组计划链接：<a class="w-other-c" href="https://bgm.tv/subject/400602">https://bgm.tv/subject/400602</a></p>
    </div>

    <div class="subgroup-text" id="100">
        <a href="/Home/PublishGroup/1">桜都字幕组</a>
        <a href="/RSS/Bangumi?bangumiId=3141&amp;subgroupid=100" class="mikan-rss"><i class="fa fa-rss-square"></i></a>
    </div>
    <div class="episode-table">
        <table class="table table-striped tbl-border fadeIn">
            <thead><tr><th></th><th>番组名</th><th>大小</th><th>更新时间</th><th>播放</th></tr></thead>
            <tbody>
                <tr>
                    <td><input type="checkbox" /></td>
                    <td>
                        <a href="/Home/Episode/cccc" class="magnet-link-wrap">[桜都字幕组] 葬送的芙莉莲 / Sousou no Frieren [01][1080p][简日双语]</a>
                        <a data-clipboard-text="magnet:?xt=urn:btih:cccc" class="js-magnet magnet-link">[复制磁连]</a>
                    </td>
                    <td>512.3MB</td>
                    <td>2023/09/29 23:40</td>
                    <td><a href="/Download/20230929/cccc.torrent"><img src="/images/download.png" /></a></td>
                </tr>
            </tbody>
        </table>
    </div>

    <div class="subgroup-text" id="209">
        <a href="/Home/PublishGroup/2">LoliHouse</a>
        <a href="https://mikanime.tv/RSS/Bangumi?bangumiId=3141&amp;subgroupid=209" class="mikan-rss"><i class="fa fa-rss-square"></i></a>
    </div>
    <div class="episode-table">
        <table class="table table-striped tbl-border fadeIn">
            <thead><tr><th></th><th>番组名</th><th>大小</th><th>更新时间</th><th>播放</th></tr></thead>
            <tbody>
                <tr>
                    <td><input type="checkbox" /></td>
                    <td>
                        <a href="/Home/Episode/bbbb" class="magnet-link-wrap">[LoliHouse] 葬送的芙莉莲 - 02 [WebRip 1080p HEVC-10bit AAC][简繁内封字幕]</a>
                        <a data-clipboard-text="magnet:?xt=urn:btih:bbbb" class="js-magnet magnet-link">[复制磁连]</a>
                    </td>
                    <td>600.2MB</td>
                    <td>2023/10/07 01:00</td>
                    <td><a href="/Download/20231007/bbbb.torrent"><img src="/images/download.png" /></a></td>
                </tr>
                <tr><td colspan="5">广告</td></tr>
                <tr>
                    <td><input type="checkbox" /></td>
                    <td>
                        <a href="/Home/Episode/aaaa" class="magnet-link-wrap">[LoliHouse] 葬送的芙莉莲 - 01 [MKV]</a>
                        <a data-clipboard-text="magnet:?xt=urn:btih:aaaa" class="js-magnet magnet-link">[复制磁连]</a>
                    </td>
                    <td>598.0MB</td>
                    <td>2023/09/30 01:00</td>
                    <td><a href="/Download/20230930/aaaa.torrent"><img src="/images/download.png" /></a></td>
                </tr>
            </tbody>
        </table>
    </div>

    <div class="subgroup-text" id="310">
        <a href="/Home/PublishGroup/3">喵萌奶茶屋</a>
    </div>
</div>
</body>
</html>
"##;

pub const SEASON_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="sk-container">
    <div class="pull-left date-select">
        <div class="sk-col date-text">2023 秋</div>
        <div class="sk-col dropdown date-dropdown">
            <ul class="dropdown-menu">
                <li class="dropdown-submenu">
                    <a>2023</a>
                    <ul class="dropdown-menu">
                        <li><a class="js-season" data-year="2023" data-season="秋">秋</a></li>
                        <li><a class="js-season" data-year="2023" data-season="夏">夏</a></li>
                        <li><a class="js-season" data-year="2023">春</a></li>
                    </ul>
                </li>
                <li class="dropdown-submenu">
                    <a>2024</a>
                    <ul class="dropdown-menu">
                        <li><a class="js-season" data-year="2024" data-season="冬">冬</a></li>
                        <li><a class="js-season" data-year="next" data-season="春">春</a></li>
                    </ul>
                </li>
            </ul>
        </div>
    </div>
</div>
<div class="sk-bangumi" data-dayofweek="1">
    <div class="row">星期一</div>
    <ul class="list-inline an-ul">
        <li>
            <span data-src="/images/Bangumi/202310/a.jpg" class="js-expand_bangumi b-lazy" data-bangumiid="3141"></span>
            <div class="an-info"><div class="an-info-group">
                <a href="/Home/Bangumi/3141" class="an-text" title="葬送的芙莉莲">葬送的芙莉莲</a>
            </div></div>
        </li>
        <li>
            <span data-src="/images/Bangumi/202310/b.jpg" class="js-expand_bangumi b-lazy" data-bangumiid="3143"></span>
            <div class="an-info"><div class="an-info-group">
                <a href="/Home/Bangumi/3143" class="an-text" title="米基与达利">米基与达利</a>
            </div></div>
        </li>
    </ul>
</div>
<div class="sk-bangumi" data-dayofweek="2">
    <div class="row">星期二</div>
    <ul class="list-inline an-ul"></ul>
</div>
<div class="sk-bangumi" data-dayofweek="0">
    <div class="row"> 星期日 </div>
    <ul class="list-inline an-ul">
        <li>
            <span data-src="https://img.example.com/c.jpg"></span>
            <div class="an-info"><div class="an-info-group">
                <a href="/Home/Bangumi/3060/" class="an-text">间谍过家家 第二季</a>
            </div></div>
        </li>
    </ul>
</div>
</body>
</html>
"#;

pub const EMPTY_SEASON_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="pull-left date-select">
    <div class="sk-col date-text">2000 冬</div>
    <ul class="dropdown-menu">
        <li><a class="js-season" data-year="2000" data-season="冬">冬</a></li>
        <li><a class="js-season" data-year="2000" data-season="春">春</a></li>
    </ul>
</div>
<div class="sk-bangumi" data-dayofweek="1">
    <div class="row">星期一</div>
    <ul class="list-inline an-ul"></ul>
</div>
<div class="sk-bangumi" data-dayofweek="2">
    <div class="row">星期二</div>
    <ul class="list-inline an-ul"></ul>
</div>
</body>
</html>
"#;

pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="central-container">
    <ul class="list-inline an-ul">
        <li>
            <a href="/Home/Bangumi/3141">
                <span data-src="/images/Bangumi/202310/a.jpg" class="b-lazy"></span>
                <div class="an-info"><div class="an-text" title="葬送的芙莉莲">葬送的芙莉莲</div></div>
            </a>
        </li>
        <li>
            <a href="/Home/Bangumi/2353">
                <span data-src="/images/Bangumi/201810/d.jpg" class="b-lazy"></span>
                <div class="an-info"><div class="an-text" title="葬送的芙莉莲 剧场版">葬送的芙莉莲 剧场版</div></div>
            </a>
        </li>
    </ul>
</div>
</body>
</html>
"#;

pub const EMPTY_SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body><div class="central-container"><ul class="list-inline an-ul"></ul></div></body></html>
"#;

/// 单个字幕组区块，锚点 id 为 "1"
pub fn release_section(rows: &[String]) -> String {
    format!(
        r#"<html><body>
        <div class="subgroup-text" id="1"><a class="mikan-rss" href="/RSS/Bangumi?subgroupid=1"></a></div>
        <div class="episode-table"><table><tbody>{}</tbody></table></div>
        </body></html>"#,
        rows.concat()
    )
}

/// 一行种子记录，links 控制行内链接数
pub fn row(name: &str, links: usize, date: Option<&str>) -> String {
    let magnet = if links >= 2 {
        r#"<a data-clipboard-text="magnet:?xt=urn:btih:x">[复制磁连]</a>"#
    } else {
        ""
    };
    let torrent = if links >= 3 {
        r#"<a href="/Download/x.torrent">下载</a>"#
    } else {
        ""
    };
    format!(
        r#"<tr><td></td><td><a href="/Home/Episode/x">{}</a>{}</td><td>100MB</td><td>{}</td><td>{}</td></tr>"#,
        name,
        magnet,
        date.unwrap_or_default(),
        torrent
    )
}
