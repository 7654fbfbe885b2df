//! Training and probe texts shared by the integration tests and benchmarks

#![allow(dead_code)]

use ngramcat_core::CategoryId;

pub const ENGLISH: CategoryId = 1;
pub const FRENCH: CategoryId = 2;
pub const GERMAN: CategoryId = 3;

pub const ENGLISH_TRAINING: &str = "\
The village stood at the edge of the forest, where the road turned north \
towards the mountains. Every morning the baker opened his shop before the \
sun was up, and the smell of fresh bread drifted through the narrow streets. \
Children walked to school in small groups, talking about the games they \
would play in the afternoon. Their parents worked in the fields or in the \
workshops near the river, and in the evening the whole town gathered in the \
square to share the news of the day. Nobody could remember when the old \
bridge had been built, but everyone agreed that it was the most beautiful \
thing in the valley. Travellers who passed through often stayed longer than \
they had planned, because the people were friendly and the food was good. \
In winter the snow covered the roofs and the paths, and the only sound was \
the wind in the trees. When spring arrived, the farmers were already \
thinking about the harvest, and the whole valley was green again. It was \
not a rich place, but it was a happy one, and that was enough for those \
who lived there. They would say that nothing important ever happened in \
their village, and they were proud of it.";

pub const FRENCH_TRAINING: &str = "\
Le village se trouvait au bord de la forêt, là où la route tournait vers \
les montagnes. Chaque matin, le boulanger ouvrait sa boutique avant le lever \
du soleil, et l'odeur du pain frais se répandait dans les rues étroites. Les \
enfants allaient à l'école par petits groupes, en parlant des jeux auxquels \
ils joueraient pendant l'après-midi. Leurs parents travaillaient dans les \
champs ou dans les ateliers près de la rivière, et le soir toute la ville se \
réunissait sur la place pour partager les nouvelles de la journée. Personne \
ne se souvenait de la date de construction du vieux pont, mais tout le monde \
était d'accord pour dire que c'était la plus belle chose de la vallée. Les \
voyageurs qui passaient restaient souvent plus longtemps que prévu, parce \
que les habitants étaient aimables et que la cuisine était bonne. En hiver, \
la neige couvrait les toits et les chemins, et le seul bruit était celui du \
vent dans les arbres. Quand le printemps arrivait, les paysans pensaient déjà \
à la récolte, et toute la vallée redevenait verte. Ce n'était pas un endroit \
riche, mais c'était un endroit heureux, et cela suffisait à ceux qui y \
vivaient.";

pub const GERMAN_TRAINING: &str = "\
Das Dorf lag am Rand des Waldes, dort wo die Straße nach Norden zu den \
Bergen abbog. Jeden Morgen öffnete der Bäcker seinen Laden, bevor die Sonne \
aufging, und der Geruch von frischem Brot zog durch die engen Gassen. Die \
Kinder gingen in kleinen Gruppen zur Schule und sprachen über die Spiele, \
die sie am Nachmittag spielen wollten. Ihre Eltern arbeiteten auf den \
Feldern oder in den Werkstätten am Fluss, und am Abend versammelte sich die \
ganze Stadt auf dem Platz, um die Neuigkeiten des Tages zu teilen. Niemand \
wusste mehr, wann die alte Brücke gebaut worden war, aber alle waren sich \
einig, dass sie das schönste Ding im ganzen Tal war. Im Winter bedeckte der \
Schnee die Dächer und die Wege, und das einzige Geräusch war der Wind in den \
Bäumen. Wenn der Frühling kam, dachten die Bauern schon an die Ernte, und \
das ganze Tal wurde wieder grün.";

pub const ENGLISH_PROBE: &str =
    "We are going to walk through the park with the children this afternoon, \
     and then we will have dinner together at the house of our friends.";

pub const FRENCH_PROBE: &str =
    "Nous allons nous promener dans le parc avec les enfants cet après-midi, \
     puis nous dînerons ensemble chez nos amis.";

pub const GERMAN_PROBE: &str =
    "Wir werden heute Nachmittag mit den Kindern durch den Park spazieren gehen \
     und danach bei unseren Freunden zusammen essen.";
